use super::Lang;
use super::plural::PluralCategory::{self, Few, Many, One, Other, Two, Zero};

pub enum Message
{
    Text(&'static str),
    Plural(&'static [(PluralCategory, &'static str)]),
}

use Message::{Plural, Text};

type Table = &'static [(&'static str, Message)];

pub fn table(lang: Lang) -> Table
{
    match lang {
        Lang::Fr => FR,
        Lang::En => EN,
        Lang::Vi => VI,
        Lang::Es => ES,
        Lang::Ko => KO,
        Lang::Hi => HI,
        Lang::It => IT,
        Lang::Zh => ZH,
        Lang::Ar => AR,
    }
}

pub fn lookup(lang: Lang, key: &str) -> Option<&'static Message>
{
    table(lang)
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, message)| message)
}

static FR: Table = &[
    ("title", Text("Jeu de Memory")),
    ("choosePairs", Text("Choisissez le nombre de paires")),
    ("pairs", Plural(&[(One, "{{count}} paire"), (Other, "{{count}} paires")])),
    ("cards", Plural(&[(One, "{{count}} carte"), (Other, "{{count}} cartes")])),
    ("startGame", Text("Commencer la partie")),
    ("newGame", Text("Nouvelle partie")),
    ("moves", Plural(&[(One, "{{count}} coup"), (Other, "{{count}} coups")])),
    (
        "victory",
        Plural(&[
            (One, "Bravo ! Vous avez gagné en {{count}} coup !"),
            (Other, "Bravo ! Vous avez gagné en {{count}} coups !"),
        ]),
    ),
    ("language", Text("Langue")),
    ("presentation.welcome", Text("Bienvenue dans le jeu de Memory !")),
    (
        "presentation.description",
        Text("Testez votre mémoire en retrouvant toutes les paires de fruits cachées."),
    ),
    ("presentation.howToPlay", Text("Comment jouer")),
    ("presentation.rule1", Text("Retournez deux cartes à chaque tour.")),
    ("presentation.rule2", Text("Si les symboles sont identiques, la paire reste visible.")),
    ("presentation.rule3", Text("Sinon, les cartes se retournent face cachée.")),
    ("presentation.rule4", Text("Trouvez toutes les paires en un minimum de coups.")),
    ("presentation.features", Text("Fonctionnalités")),
    ("presentation.feature1", Text("Trois niveaux : 4, 6 ou 8 paires")),
    ("presentation.feature2", Text("Compteur de coups pour suivre votre progression")),
    ("presentation.feature3", Text("Neuf langues disponibles")),
    ("presentation.feature4", Text("Thème sombre aux couleurs vives")),
    ("presentation.letsPlay", Text("C'est parti !")),
    ("hint.presentation", Text("Entrée : continuer · L : langue · Échap : quitter")),
    (
        "hint.menu",
        Text("←/→ ou 1-3 : choisir · Entrée : commencer · L : langue · Échap : quitter"),
    ),
    (
        "hint.board",
        Text("Flèches : déplacer · Entrée/Espace : retourner · N : nouvelle partie · L : langue · Échap : quitter"),
    ),
];

static EN: Table = &[
    ("title", Text("Memory Game")),
    ("choosePairs", Text("Choose the number of pairs")),
    ("pairs", Plural(&[(One, "{{count}} pair"), (Other, "{{count}} pairs")])),
    ("cards", Plural(&[(One, "{{count}} card"), (Other, "{{count}} cards")])),
    ("startGame", Text("Start game")),
    ("newGame", Text("New game")),
    ("moves", Plural(&[(One, "{{count}} move"), (Other, "{{count}} moves")])),
    (
        "victory",
        Plural(&[
            (One, "Congratulations! You won in {{count}} move!"),
            (Other, "Congratulations! You won in {{count}} moves!"),
        ]),
    ),
    ("language", Text("Language")),
    ("presentation.welcome", Text("Welcome to the Memory Game!")),
    (
        "presentation.description",
        Text("Test your memory by finding every hidden pair of fruit."),
    ),
    ("presentation.howToPlay", Text("How to play")),
    ("presentation.rule1", Text("Flip two cards each turn.")),
    ("presentation.rule2", Text("If the symbols match, the pair stays revealed.")),
    ("presentation.rule3", Text("Otherwise the cards turn face down again.")),
    ("presentation.rule4", Text("Find every pair in as few moves as possible.")),
    ("presentation.features", Text("Features")),
    ("presentation.feature1", Text("Three levels: 4, 6 or 8 pairs")),
    ("presentation.feature2", Text("Move counter to follow your progress")),
    ("presentation.feature3", Text("Nine languages available")),
    ("presentation.feature4", Text("Dark theme with vivid colours")),
    ("presentation.letsPlay", Text("Let's play!")),
    ("hint.presentation", Text("Enter: continue · L: language · Esc: quit")),
    ("hint.menu", Text("←/→ or 1-3: choose · Enter: start · L: language · Esc: quit")),
    (
        "hint.board",
        Text("Arrows: move · Enter/Space: flip · N: new game · L: language · Esc: quit"),
    ),
];

static VI: Table = &[
    ("title", Text("Trò chơi Trí nhớ")),
    ("choosePairs", Text("Chọn số cặp")),
    ("pairs", Plural(&[(Other, "{{count}} cặp")])),
    ("cards", Plural(&[(Other, "{{count}} thẻ")])),
    ("startGame", Text("Bắt đầu")),
    ("newGame", Text("Ván mới")),
    ("moves", Plural(&[(Other, "{{count}} lượt")])),
    ("victory", Plural(&[(Other, "Chúc mừng! Bạn đã thắng sau {{count}} lượt!")])),
    ("language", Text("Ngôn ngữ")),
    ("presentation.welcome", Text("Chào mừng đến với trò chơi Trí nhớ!")),
    (
        "presentation.description",
        Text("Thử thách trí nhớ của bạn bằng cách tìm tất cả các cặp trái cây ẩn."),
    ),
    ("presentation.howToPlay", Text("Cách chơi")),
    ("presentation.rule1", Text("Lật hai thẻ mỗi lượt.")),
    ("presentation.rule2", Text("Nếu hai biểu tượng giống nhau, cặp thẻ sẽ được giữ mở.")),
    ("presentation.rule3", Text("Nếu không, các thẻ sẽ úp lại.")),
    ("presentation.rule4", Text("Tìm tất cả các cặp với ít lượt nhất.")),
    ("presentation.features", Text("Tính năng")),
    ("presentation.feature1", Text("Ba cấp độ: 4, 6 hoặc 8 cặp")),
    ("presentation.feature2", Text("Bộ đếm lượt để theo dõi tiến độ")),
    ("presentation.feature3", Text("Chín ngôn ngữ")),
    ("presentation.feature4", Text("Giao diện tối với màu sắc sống động")),
    ("presentation.letsPlay", Text("Chơi thôi!")),
    ("hint.presentation", Text("Enter: tiếp tục · L: ngôn ngữ · Esc: thoát")),
    ("hint.menu", Text("←/→ hoặc 1-3: chọn · Enter: bắt đầu · L: ngôn ngữ · Esc: thoát")),
    (
        "hint.board",
        Text("Mũi tên: di chuyển · Enter/Space: lật · N: ván mới · L: ngôn ngữ · Esc: thoát"),
    ),
];

static ES: Table = &[
    ("title", Text("Juego de Memoria")),
    ("choosePairs", Text("Elige el número de parejas")),
    ("pairs", Plural(&[(One, "{{count}} pareja"), (Other, "{{count}} parejas")])),
    ("cards", Plural(&[(One, "{{count}} carta"), (Other, "{{count}} cartas")])),
    ("startGame", Text("Empezar partida")),
    ("newGame", Text("Nueva partida")),
    ("moves", Plural(&[(One, "{{count}} movimiento"), (Other, "{{count}} movimientos")])),
    (
        "victory",
        Plural(&[
            (One, "¡Felicidades! Ganaste en {{count}} movimiento."),
            (Other, "¡Felicidades! Ganaste en {{count}} movimientos."),
        ]),
    ),
    ("language", Text("Idioma")),
    ("presentation.welcome", Text("¡Bienvenido al Juego de Memoria!")),
    (
        "presentation.description",
        Text("Pon a prueba tu memoria encontrando todas las parejas de frutas ocultas."),
    ),
    ("presentation.howToPlay", Text("Cómo jugar")),
    ("presentation.rule1", Text("Da la vuelta a dos cartas en cada turno.")),
    ("presentation.rule2", Text("Si los símbolos coinciden, la pareja queda descubierta.")),
    ("presentation.rule3", Text("Si no, las cartas vuelven a ocultarse.")),
    ("presentation.rule4", Text("Encuentra todas las parejas con el menor número de movimientos.")),
    ("presentation.features", Text("Características")),
    ("presentation.feature1", Text("Tres niveles: 4, 6 u 8 parejas")),
    ("presentation.feature2", Text("Contador de movimientos para seguir tu progreso")),
    ("presentation.feature3", Text("Nueve idiomas disponibles")),
    ("presentation.feature4", Text("Tema oscuro con colores vivos")),
    ("presentation.letsPlay", Text("¡A jugar!")),
    ("hint.presentation", Text("Intro: continuar · L: idioma · Esc: salir")),
    ("hint.menu", Text("←/→ o 1-3: elegir · Intro: empezar · L: idioma · Esc: salir")),
    (
        "hint.board",
        Text("Flechas: mover · Intro/Espacio: voltear · N: nueva partida · L: idioma · Esc: salir"),
    ),
];

static KO: Table = &[
    ("title", Text("메모리 게임")),
    ("choosePairs", Text("짝의 개수를 선택하세요")),
    ("pairs", Plural(&[(Other, "{{count}}쌍")])),
    ("cards", Plural(&[(Other, "카드 {{count}}장")])),
    ("startGame", Text("게임 시작")),
    ("newGame", Text("새 게임")),
    ("moves", Plural(&[(Other, "{{count}}번 이동")])),
    ("victory", Plural(&[(Other, "축하합니다! {{count}}번 만에 승리했습니다!")])),
    ("language", Text("언어")),
    ("presentation.welcome", Text("메모리 게임에 오신 것을 환영합니다!")),
    (
        "presentation.description",
        Text("숨겨진 과일 짝을 모두 찾아 기억력을 시험해 보세요."),
    ),
    ("presentation.howToPlay", Text("게임 방법")),
    ("presentation.rule1", Text("한 번에 카드 두 장을 뒤집으세요.")),
    ("presentation.rule2", Text("두 기호가 같으면 그 짝은 계속 공개됩니다.")),
    ("presentation.rule3", Text("다르면 카드가 다시 뒤집힙니다.")),
    ("presentation.rule4", Text("가장 적은 이동으로 모든 짝을 찾으세요.")),
    ("presentation.features", Text("특징")),
    ("presentation.feature1", Text("세 가지 난이도: 4, 6, 8쌍")),
    ("presentation.feature2", Text("진행 상황을 보여 주는 이동 카운터")),
    ("presentation.feature3", Text("9개 언어 지원")),
    ("presentation.feature4", Text("선명한 색상의 다크 테마")),
    ("presentation.letsPlay", Text("시작해요!")),
    ("hint.presentation", Text("Enter: 계속 · L: 언어 · Esc: 종료")),
    ("hint.menu", Text("←/→ 또는 1-3: 선택 · Enter: 시작 · L: 언어 · Esc: 종료")),
    (
        "hint.board",
        Text("방향키: 이동 · Enter/Space: 뒤집기 · N: 새 게임 · L: 언어 · Esc: 종료"),
    ),
];

static HI: Table = &[
    ("title", Text("मेमोरी गेम")),
    ("choosePairs", Text("जोड़ियों की संख्या चुनें")),
    ("pairs", Plural(&[(One, "{{count}} जोड़ी"), (Other, "{{count}} जोड़ियाँ")])),
    ("cards", Plural(&[(Other, "{{count}} कार्ड")])),
    ("startGame", Text("खेल शुरू करें")),
    ("newGame", Text("नया खेल")),
    ("moves", Plural(&[(One, "{{count}} चाल"), (Other, "{{count}} चालें")])),
    (
        "victory",
        Plural(&[
            (One, "बधाई हो! आपने {{count}} चाल में जीत हासिल की!"),
            (Other, "बधाई हो! आपने {{count}} चालों में जीत हासिल की!"),
        ]),
    ),
    ("language", Text("भाषा")),
    ("presentation.welcome", Text("मेमोरी गेम में आपका स्वागत है!")),
    (
        "presentation.description",
        Text("छिपी हुई फलों की सभी जोड़ियाँ ढूँढकर अपनी याददाश्त परखें।"),
    ),
    ("presentation.howToPlay", Text("कैसे खेलें")),
    ("presentation.rule1", Text("हर बारी में दो कार्ड पलटें।")),
    ("presentation.rule2", Text("अगर चिह्न एक जैसे हैं, तो जोड़ी खुली रहती है।")),
    ("presentation.rule3", Text("नहीं तो कार्ड फिर से उलट जाते हैं।")),
    ("presentation.rule4", Text("कम से कम चालों में सभी जोड़ियाँ ढूँढें।")),
    ("presentation.features", Text("विशेषताएँ")),
    ("presentation.feature1", Text("तीन स्तर: 4, 6 या 8 जोड़ियाँ")),
    ("presentation.feature2", Text("आपकी प्रगति दिखाने वाला चाल काउंटर")),
    ("presentation.feature3", Text("नौ भाषाएँ उपलब्ध")),
    ("presentation.feature4", Text("चमकीले रंगों वाली डार्क थीम")),
    ("presentation.letsPlay", Text("चलो खेलें!")),
    ("hint.presentation", Text("Enter: जारी रखें · L: भाषा · Esc: बाहर निकलें")),
    ("hint.menu", Text("←/→ या 1-3: चुनें · Enter: शुरू करें · L: भाषा · Esc: बाहर निकलें")),
    (
        "hint.board",
        Text("तीर कुंजियाँ: चलें · Enter/Space: पलटें · N: नया खेल · L: भाषा · Esc: बाहर निकलें"),
    ),
];

static IT: Table = &[
    ("title", Text("Gioco di Memoria")),
    ("choosePairs", Text("Scegli il numero di coppie")),
    ("pairs", Plural(&[(One, "{{count}} coppia"), (Other, "{{count}} coppie")])),
    ("cards", Plural(&[(One, "{{count}} carta"), (Other, "{{count}} carte")])),
    ("startGame", Text("Inizia la partita")),
    ("newGame", Text("Nuova partita")),
    ("moves", Plural(&[(One, "{{count}} mossa"), (Other, "{{count}} mosse")])),
    (
        "victory",
        Plural(&[
            (One, "Complimenti! Hai vinto in {{count}} mossa!"),
            (Other, "Complimenti! Hai vinto in {{count}} mosse!"),
        ]),
    ),
    ("language", Text("Lingua")),
    ("presentation.welcome", Text("Benvenuto nel Gioco di Memoria!")),
    (
        "presentation.description",
        Text("Metti alla prova la tua memoria trovando tutte le coppie di frutta nascoste."),
    ),
    ("presentation.howToPlay", Text("Come si gioca")),
    ("presentation.rule1", Text("Gira due carte per turno.")),
    ("presentation.rule2", Text("Se i simboli coincidono, la coppia resta scoperta.")),
    ("presentation.rule3", Text("Altrimenti le carte tornano coperte.")),
    ("presentation.rule4", Text("Trova tutte le coppie con il minor numero di mosse.")),
    ("presentation.features", Text("Caratteristiche")),
    ("presentation.feature1", Text("Tre livelli: 4, 6 o 8 coppie")),
    ("presentation.feature2", Text("Contatore di mosse per seguire i tuoi progressi")),
    ("presentation.feature3", Text("Nove lingue disponibili")),
    ("presentation.feature4", Text("Tema scuro dai colori vivaci")),
    ("presentation.letsPlay", Text("Giochiamo!")),
    ("hint.presentation", Text("Invio: continua · L: lingua · Esc: esci")),
    ("hint.menu", Text("←/→ o 1-3: scegli · Invio: inizia · L: lingua · Esc: esci")),
    (
        "hint.board",
        Text("Frecce: sposta · Invio/Spazio: gira · N: nuova partita · L: lingua · Esc: esci"),
    ),
];

static ZH: Table = &[
    ("title", Text("记忆翻牌游戏")),
    ("choosePairs", Text("选择配对数量")),
    ("pairs", Plural(&[(Other, "{{count}} 对")])),
    ("cards", Plural(&[(Other, "{{count}} 张牌")])),
    ("startGame", Text("开始游戏")),
    ("newGame", Text("新游戏")),
    ("moves", Plural(&[(Other, "{{count}} 步")])),
    ("victory", Plural(&[(Other, "恭喜！你用 {{count}} 步获胜！")])),
    ("language", Text("语言")),
    ("presentation.welcome", Text("欢迎来到记忆翻牌游戏！")),
    ("presentation.description", Text("找出所有隐藏的水果配对，考验你的记忆力。")),
    ("presentation.howToPlay", Text("玩法")),
    ("presentation.rule1", Text("每回合翻开两张牌。")),
    ("presentation.rule2", Text("如果图案相同，这对牌保持翻开。")),
    ("presentation.rule3", Text("否则两张牌会重新盖上。")),
    ("presentation.rule4", Text("用最少的步数找出所有配对。")),
    ("presentation.features", Text("特色")),
    ("presentation.feature1", Text("三个难度：4、6 或 8 对")),
    ("presentation.feature2", Text("步数计数器记录你的进度")),
    ("presentation.feature3", Text("支持九种语言")),
    ("presentation.feature4", Text("色彩鲜明的深色主题")),
    ("presentation.letsPlay", Text("开始吧！")),
    ("hint.presentation", Text("Enter：继续 · L：语言 · Esc：退出")),
    ("hint.menu", Text("←/→ 或 1-3：选择 · Enter：开始 · L：语言 · Esc：退出")),
    ("hint.board", Text("方向键：移动 · Enter/空格：翻牌 · N：新游戏 · L：语言 · Esc：退出")),
];

static AR: Table = &[
    ("title", Text("لعبة الذاكرة")),
    ("choosePairs", Text("اختر عدد الأزواج")),
    (
        "pairs",
        Plural(&[
            (Zero, "{{count}} زوج"),
            (One, "زوج واحد"),
            (Two, "زوجان"),
            (Few, "{{count}} أزواج"),
            (Many, "{{count}} زوجًا"),
            (Other, "{{count}} زوج"),
        ]),
    ),
    (
        "cards",
        Plural(&[
            (One, "بطاقة واحدة"),
            (Two, "بطاقتان"),
            (Few, "{{count}} بطاقات"),
            (Other, "{{count}} بطاقة"),
        ]),
    ),
    ("startGame", Text("ابدأ اللعبة")),
    ("newGame", Text("لعبة جديدة")),
    (
        "moves",
        Plural(&[
            (One, "حركة واحدة"),
            (Two, "حركتان"),
            (Few, "{{count}} حركات"),
            (Other, "{{count}} حركة"),
        ]),
    ),
    (
        "victory",
        Plural(&[
            (One, "تهانينا! لقد فزت بحركة واحدة!"),
            (Two, "تهانينا! لقد فزت بحركتين!"),
            (Few, "تهانينا! لقد فزت في {{count}} حركات!"),
            (Other, "تهانينا! لقد فزت في {{count}} حركة!"),
        ]),
    ),
    ("language", Text("اللغة")),
    ("presentation.welcome", Text("مرحبًا بك في لعبة الذاكرة!")),
    (
        "presentation.description",
        Text("اختبر ذاكرتك بالعثور على جميع أزواج الفاكهة المخفية."),
    ),
    ("presentation.howToPlay", Text("طريقة اللعب")),
    ("presentation.rule1", Text("اقلب بطاقتين في كل دور.")),
    ("presentation.rule2", Text("إذا تطابق الرمزان، يبقى الزوج مكشوفًا.")),
    ("presentation.rule3", Text("وإلا تعود البطاقتان مقلوبتين.")),
    ("presentation.rule4", Text("اعثر على جميع الأزواج بأقل عدد من الحركات.")),
    ("presentation.features", Text("المزايا")),
    ("presentation.feature1", Text("ثلاثة مستويات: 4 أو 6 أو 8 أزواج")),
    ("presentation.feature2", Text("عداد حركات لمتابعة تقدمك")),
    ("presentation.feature3", Text("تسع لغات متاحة")),
    ("presentation.feature4", Text("سمة داكنة بألوان زاهية")),
    ("presentation.letsPlay", Text("هيا نلعب!")),
    ("hint.presentation", Text("Enter: متابعة · L: اللغة · Esc: خروج")),
    ("hint.menu", Text("←/→ أو 1-3: اختيار · Enter: ابدأ · L: اللغة · Esc: خروج")),
    (
        "hint.board",
        Text("الأسهم: تحريك · Enter/Space: قلب · N: لعبة جديدة · L: اللغة · Esc: خروج"),
    ),
];
